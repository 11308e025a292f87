use serde::{Deserialize, Serialize};

/// One captured job run: both log streams plus the exit code.
///
/// This is the request body for the analyze endpoint, wire-serialized with
/// exactly these three fields and `exit_code` as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLog {
    pub stderr: String,
    pub stdout: String,
    pub exit_code: i32,
}

/// Request body for the bulk summarize endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkJobLogs {
    pub jobs: Vec<JobLog>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn job_log_serializes_exactly_three_fields() {
        let job = JobLog {
            stderr: "err".to_string(),
            stdout: "out".to_string(),
            exit_code: 1,
        };

        let body = serde_json::to_string(&job).unwrap();
        assert_eq!(body, r#"{"stderr":"err","stdout":"out","exit_code":1}"#);
    }

    #[test]
    fn exit_code_is_a_json_number() {
        let job = JobLog {
            stderr: String::new(),
            stdout: String::new(),
            exit_code: 137,
        };

        let value = serde_json::to_value(&job).unwrap();
        assert!(value["exit_code"].is_i64());
        assert_eq!(value["exit_code"], 137);
    }

    #[test]
    fn serialization_is_stable_across_repeats() {
        let job = JobLog {
            stderr: "ORA-12541: TNS:no listener".to_string(),
            stdout: "Starting job...".to_string(),
            exit_code: -1,
        };

        let first = serde_json::to_string(&job).unwrap();
        let second = serde_json::to_string(&job).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bulk_body_nests_jobs_under_one_key() {
        let bulk = BulkJobLogs {
            jobs: vec![JobLog {
                stderr: "out of memory".to_string(),
                stdout: String::new(),
                exit_code: 137,
            }],
        };

        let value = serde_json::to_value(&bulk).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "jobs": [{"stderr": "out of memory", "stdout": "", "exit_code": 137}]
            })
        );
    }
}
