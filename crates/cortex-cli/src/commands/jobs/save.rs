use std::io::Read;
use std::path::Path;

use anyhow::Context;
use cortex_client::JobsClient;
use cortex_core::{JobSpec, Profile};

use crate::output::{Outcome, Report, render_json, settle};

/// Read and validate a job definition; `-` reads stdin.
pub fn read_spec(file: &Path) -> anyhow::Result<JobSpec> {
    let raw = if file.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read job definition from stdin")?;
        raw
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read job definition {}", file.display()))?
    };

    parse_spec(&raw).with_context(|| format!("invalid job definition {}", file.display()))
}

fn parse_spec(raw: &str) -> anyhow::Result<JobSpec> {
    let spec: JobSpec = serde_json::from_str(raw)?;
    spec.validate()?;
    Ok(spec)
}

pub async fn run(client: &JobsClient, profile: &Profile, spec: &JobSpec) -> anyhow::Result<Report> {
    let outcome = settle(client.save_job(&profile.token, spec).await)?;
    render(outcome)
}

pub fn render(outcome: Outcome) -> anyhow::Result<Report> {
    match outcome {
        Ok(body) => Ok(Report::Success(render_json(&body)?)),
        Err(failure) => Ok(Report::Failure(failure.line("Failed to save job"))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::output::Failure;

    #[test]
    fn reads_definition_from_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("job.json");
        std::fs::write(&path, r#"{"name": "etl", "image": "c12e/etl", "extra": true}"#)
            .expect("write");

        let spec = read_spec(&path).expect("spec");
        assert_eq!(spec.name, "etl");
        assert_eq!(spec.image, Some(json!("c12e/etl")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let error = read_spec(&tmp.path().join("absent.json")).expect_err("should fail");
        assert!(error.to_string().contains("failed to read job definition"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let error = parse_spec(r#"{"name": "  "}"#).expect_err("should fail");
        assert!(error.to_string().contains("job name must not be empty"));
        assert!(parse_spec("not json").is_err());
    }

    #[test]
    fn render_outcomes() {
        assert_eq!(
            render(Ok(json!({"version": 3}))).expect("render"),
            Report::Success("{\n  \"version\": 3\n}".into())
        );
        let failure = Failure {
            status: Some(400),
            message: "bad image".into(),
        };
        assert_eq!(
            render(Err(failure)).expect("render"),
            Report::Failure("Failed to save job: 400 bad image".into())
        );
    }
}
