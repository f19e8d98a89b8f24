#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to resolve home directory for config root")]
    HomeDirectoryUnavailable,
    #[error("failed to serialize {artifact}: {source}")]
    Serialize {
        artifact: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteArtifact {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read shell profile {path}: {source}")]
    ReadProfile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to append to shell profile {path}: {source}")]
    AppendProfile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read setup state {path}: {source}")]
    ReadState {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse setup state {path}: {source}")]
    ParseState {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
