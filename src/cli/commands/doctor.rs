//! Doctor command - verify configuration and connectivity.

use crate::cli::Output;
use crate::config::Settings;
use crate::platform::InnertubeClient;
use crate::summarizer::SummaryClient;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub async fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("ytsum Doctor");
    println!();
    println!("Checking configuration and connectivity...\n");

    let mut checks = Vec::new();

    println!("{}", style("Configuration").bold());
    checks.push(check_config_file());
    checks.push(check_listen_addr(settings).await);
    for check in &checks {
        check.print();
    }

    println!();

    println!("{}", style("Services").bold());
    let service_checks = vec![
        check_youtube(settings).await,
        check_summarizer(settings).await,
    ];
    for check in &service_checks {
        check.print();
    }
    checks.extend(service_checks);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!("{} error(s) found.", errors));
        anyhow::bail!("doctor found {} error(s)", errors);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! ytsum is ready to use.");
    }

    Ok(())
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            &format!("Create {} to override defaults", config_path.display()),
        )
    }
}

/// Check the transcript API address can be bound.
async fn check_listen_addr(settings: &Settings) -> CheckResult {
    let addr = settings.bind_addr();
    match tokio::net::TcpListener::bind(&addr).await {
        Ok(_) => CheckResult::ok("Listen address", &format!("{} is free", addr)),
        Err(e) => CheckResult::warning(
            "Listen address",
            &format!("{} unavailable: {}", addr, e),
            "Another process (maybe ytsum serve) is using it; change server.port if needed",
        ),
    }
}

/// Check a YouTube client session can be created.
async fn check_youtube(settings: &Settings) -> CheckResult {
    match InnertubeClient::create(&settings.youtube).await {
        Ok(_) => CheckResult::ok("YouTube", &format!("reachable at {}", settings.youtube.base_url)),
        Err(e) => CheckResult::error(
            "YouTube",
            &format!("client setup failed: {}", e),
            "Check network access and youtube.base_url",
        ),
    }
}

/// Check the summarization webhook is a valid URL and something answers on it.
async fn check_summarizer(settings: &Settings) -> CheckResult {
    let client = match SummaryClient::new(&settings.summarizer.webhook_url) {
        Ok(client) => client,
        Err(e) => {
            return CheckResult::error(
                "Summarizer",
                &e.to_string(),
                "Set summarizer.webhook_url to a full http(s) URL",
            )
        }
    };

    match reqwest::get(client.endpoint().clone()).await {
        Ok(response) => CheckResult::ok(
            "Summarizer",
            &format!("{} answered ({})", client.endpoint(), response.status()),
        ),
        Err(e) => CheckResult::warning(
            "Summarizer",
            &format!("{} unreachable: {}", client.endpoint(), e),
            "Start the workflow engine before using the MCP tool",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_summarizer_url() {
        let mut settings = Settings::default();
        settings.summarizer.webhook_url = "not a url".to_string();

        let result = check_summarizer(&settings).await;
        assert_eq!(result.status, CheckStatus::Error);
    }
}
