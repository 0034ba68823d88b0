use anyhow::Error;
use areacodes_config::ConfigError;
use areacodes_core::CoreError;
use areacodes_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::NotFound => EXIT_NOT_FOUND,
        StoreErrorKind::NotAFile | StoreErrorKind::NotADirectory | StoreErrorKind::Core => {
            EXIT_INVALID_INPUT
        }
        StoreErrorKind::NoAccess | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingConfigFile(_) => EXIT_NOT_FOUND,
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::InvalidEnvironment(_)
        | ConfigError::InvalidOutputFileName(_)
        | ConfigError::EmptyPath { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
