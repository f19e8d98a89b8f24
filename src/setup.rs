pub mod navigation;
pub mod persistence;
pub mod screens;
pub mod state;
pub mod validate;

pub use navigation::{
    parse_scripted_wizard_keys, wizard_action_from_key, wizard_transition, WizardAction,
    WizardEffect, WizardScreen, WizardState, WizardTransition,
};
pub use persistence::{emit_setup_artifacts, load_persisted_setup, EmitSummary, PersistedSetup};
pub use state::{ExtensionId, Platform, SetupState};
pub use validate::{validate_api_key, ApiKeyError};
