//! `folio-admin` command-line entry point.

use std::process::ExitCode;

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use serde_json::json;

use folio_app::AppContext;
use folio_app::screens::LoginScreen;
use folio_app::shell::SESSION_EXPIRED_MESSAGE;
use folio_client::ClientConfig;
use folio_core::LoginRequest;
use folio_events::{SESSION_EXPIRED, listener};

const ENV_ADMIN_PASSWORD: &str = "FOLIO_ADMIN_PASSWORD";

const USAGE: &str = "usage: folio-admin <command>

commands:
  login <email>      sign in (password read from FOLIO_ADMIN_PASSWORD)
  logout             forget the stored session
  whoami             show the signed-in admin
  list <resource>    skills | projects | experience | education | hobbies | testimonials
  portfolio          show the aggregated public portfolio
  messages           list contact messages (admin)
  health             check that the API is reachable";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Login(String),
    Logout,
    Whoami,
    List(String),
    Portfolio,
    Messages,
    Health,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let mut args = args.iter().map(String::as_str);
        let command = match (args.next(), args.next()) {
            (Some("login"), Some(email)) => Command::Login(email.to_string()),
            (Some("logout"), None) => Command::Logout,
            (Some("whoami"), None) => Command::Whoami,
            (Some("list"), Some(resource)) => Command::List(resource.to_string()),
            (Some("portfolio"), None) => Command::Portfolio,
            (Some("messages"), None) => Command::Messages,
            (Some("health"), None) => Command::Health,
            _ => bail!("{USAGE}"),
        };
        if args.next().is_some() {
            bail!("{USAGE}");
        }
        Ok(command)
    }

    /// Whether a rejected token means an expired session. A 401 from
    /// `login` only means wrong credentials.
    fn uses_session(&self) -> bool {
        !matches!(self, Command::Login(_))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    folio_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<()> {
    let command = Command::parse(args)?;
    let ctx = AppContext::from_config(ClientConfig::from_env())
        .context("failed to initialize the API client")?;

    if command.uses_session() {
        ctx.relay.subscribe(
            SESSION_EXPIRED,
            listener(|_| eprintln!("{SESSION_EXPIRED_MESSAGE}")),
        );
    }

    tracing::debug!(?command, "running command");

    match command {
        Command::Login(email) => {
            let password = std::env::var(ENV_ADMIN_PASSWORD)
                .with_context(|| format!("{ENV_ADMIN_PASSWORD} is not set"))?;

            let mut screen = LoginScreen::new(ctx.auth.clone(), ctx.navigator.clone());
            if !screen.submit(LoginRequest { email, password }).await {
                let reason = screen.error.unwrap_or_else(|| "login failed".to_string());
                return Err(anyhow!(reason));
            }
            print_json(&ctx.auth.current_user())
        }
        Command::Logout => {
            ctx.auth.logout()?;
            print_json(&json!({ "signedIn": false }))
        }
        Command::Whoami => match ctx.auth.current_user() {
            Some(admin) if ctx.auth.is_authenticated() => print_json(&admin),
            _ => bail!("not signed in"),
        },
        Command::List(resource) => {
            let content = &ctx.content;
            match resource.as_str() {
                "skills" => print_json(&content.list_skills().await?),
                "projects" => print_json(&content.list_projects().await?),
                "experience" => print_json(&content.list_experience().await?),
                "education" => print_json(&content.list_education().await?),
                "hobbies" => print_json(&content.list_hobbies().await?),
                "testimonials" => print_json(&content.approved_testimonials().await?),
                other => bail!("unknown resource {other:?}\n\n{USAGE}"),
            }
        }
        Command::Portfolio => print_json(&ctx.content.portfolio().await?),
        Command::Messages => print_json(&ctx.content.list_messages().await?),
        Command::Health => {
            let healthy = ctx.content.health().await;
            print_json(&json!({ "healthy": healthy }))?;
            if !healthy {
                bail!("API at {} is unreachable", ctx.config.api_base_url());
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
