//! Command Line Front End
//!
//! 子命令与交互式会话，只负责把控制器状态渲染成文本

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use pytania::application::{BackendPort, QuestionController, YearRangeController};
use pytania::config::AppConfig;
use pytania::domain::years::YearSet;
use pytania::domain::{InteractionError, InteractionState};
use pytania::infrastructure::{HttpBackendClient, HttpBackendClientConfig};

#[derive(Parser, Debug)]
#[command(name = "pytania", version, about = "Zadawanie pytań i ustawianie zakresu lat")]
pub struct Cli {
    #[arg(long, short, help = "Plik konfiguracyjny (domyślnie config.toml / config.local.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Adres serwera, nadpisuje konfigurację")]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Zadaj pytanie")]
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    #[command(about = "Ustaw zakres lat, np. \"1918, 2024\"")]
    SetYears { years: String },
    #[command(about = "Sprawdź, czy serwer działa")]
    Health,
    #[command(about = "Sesja interaktywna")]
    Interactive,
}

pub async fn run(command: Command, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let backend_config = HttpBackendClientConfig::new(config.backend.url.clone())
        .with_timeout(config.backend.timeout_secs);
    let backend: Arc<dyn BackendPort> = Arc::new(HttpBackendClient::new(backend_config)?);

    match command {
        Command::Ask { question } => {
            let controller = QuestionController::new(backend);
            let outcome = controller.submit(&question.join(" ")).await;
            Ok(report(outcome.map(|r| format!("Odpowiedź: {}", r.answer))))
        }
        Command::SetYears { years } => {
            let controller = YearRangeController::new(backend);
            warn_dropped(&years);
            let outcome = controller.submit(&years).await;
            Ok(report(outcome.map(|r| r.message)))
        }
        Command::Health => {
            if backend.health_check().await {
                println!("Serwer działa: {}", config.backend.url);
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Serwer niedostępny: {}", config.backend.url);
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Interactive => {
            interactive(backend).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(outcome: Result<String, InteractionError>) -> ExitCode {
    match outcome {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Błąd: {}", err.detail);
            ExitCode::FAILURE
        }
    }
}

/// 会被忽略的片段；一个年份都解析不出时也列出
fn dropped_tokens(raw: &str) -> Vec<String> {
    match YearSet::parse(raw) {
        Ok(set) => set.dropped().to_vec(),
        Err(err) => err.dropped().to_vec(),
    }
}

fn warn_dropped(raw: &str) {
    let dropped = dropped_tokens(raw);
    if !dropped.is_empty() {
        eprintln!("Pominięto: {}", dropped.join(", "));
    }
}

const HELP: &str = "\
Polecenia:
  ask <pytanie>      zadaj pytanie
  years <lata>       ustaw zakres lat, np. years 1918, 2024
  status             pokaż stan obu formularzy
  reset              wyczyść stan obu formularzy
  help               ta pomoc
  quit               zakończ";

/// 交互式会话：整个会话共用一对控制器
async fn interactive(backend: Arc<dyn BackendPort>) -> anyhow::Result<()> {
    let questions = QuestionController::new(backend.clone());
    let years = YearRangeController::new(backend);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let (command, rest) = match line.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "ask" => {
                let outcome = questions.submit(rest).await;
                report(outcome.map(|r| format!("Odpowiedź: {}", r.answer)));
            }
            "years" => {
                warn_dropped(rest);
                let outcome = years.submit(rest).await;
                report(outcome.map(|r| r.message));
            }
            "status" => {
                println!("Pytanie: {}", describe(&questions.state(), |r| r.answer.as_str()));
                println!("Lata:    {}", describe(&years.state(), |r| r.message.as_str()));
            }
            "reset" => {
                questions.reset();
                years.reset();
            }
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => eprintln!("Nieznane polecenie: {} (wpisz help)", other),
        }
    }

    Ok(())
}

fn describe<T>(state: &InteractionState<T>, text: impl Fn(&T) -> &str) -> String {
    match state {
        InteractionState::Idle => "brak".to_string(),
        InteractionState::Submitting => "wysyłanie...".to_string(),
        InteractionState::Succeeded(result) => text(result).to_string(),
        InteractionState::Failed(err) => format!("Błąd: {}", err.detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_joins_words() {
        let cli = Cli::parse_from(["pytania", "ask", "Jakie", "jest", "święto?"]);
        match cli.command {
            Command::Ask { question } => assert_eq!(question.join(" "), "Jakie jest święto?"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_set_years_with_overrides() {
        let cli = Cli::parse_from([
            "pytania",
            "--backend-url",
            "http://qa:8000",
            "set-years",
            "1918, 2024",
        ]);
        assert_eq!(cli.backend_url.as_deref(), Some("http://qa:8000"));
        assert!(matches!(cli.command, Command::SetYears { ref years } if years == "1918, 2024"));
    }

    #[test]
    fn test_dropped_tokens_listed_even_when_nothing_parses() {
        assert_eq!(dropped_tokens("abc, def"), vec!["abc", "def"]);
        assert_eq!(dropped_tokens("1918 r., xyz"), vec!["xyz"]);
        assert!(dropped_tokens("").is_empty());
        assert!(dropped_tokens("1918, 2024").is_empty());
    }

    #[test]
    fn test_describe_states() {
        let idle: InteractionState<String> = InteractionState::Idle;
        assert_eq!(describe(&idle, |s| s.as_str()), "brak");

        let failed: InteractionState<String> =
            InteractionState::Failed(InteractionError::new("Błąd serwera"));
        assert_eq!(describe(&failed, |s| s.as_str()), "Błąd: Błąd serwera");

        let done = InteractionState::Succeeded("Zakres lat został ustawiony.".to_string());
        assert_eq!(describe(&done, |s| s.as_str()), "Zakres lat został ustawiony.");
    }
}
