use logan::submitter::LogFields;

/// Field values matching the worked example from the backend contract.
pub fn sample_fields() -> LogFields {
    LogFields {
        stderr: "err".to_string(),
        stdout: "out".to_string(),
        exit_code: "1".to_string(),
    }
}

pub fn fields_with_exit_code(exit_code: &str) -> LogFields {
    LogFields {
        stderr: "ORA-12541: TNS:no listener".to_string(),
        stdout: "Starting job...".to_string(),
        exit_code: exit_code.to_string(),
    }
}
