use std::process::ExitCode;

use formstate::InputChange;
use login_cli::auth::{EMAIL_FIELD, PASSWORD_FIELD};
use login_cli::{AuthStatus, HttpAuthenticator, LoginConfig, LoginController, logging};
use simplelog::LevelFilter;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{label}: ").as_bytes()).await?;
    stdout.flush().await?;
    input.next_line().await
}

/// Ask for one field until the user enters something, applying change and
/// blur the way a text input would.
async fn read_field(
    controller: &LoginController<HttpAuthenticator>,
    input: &mut Input,
    name: &str,
    label: &str,
) -> std::io::Result<bool> {
    let form = controller.form();
    let Some(line) = prompt(input, label).await? else {
        return Ok(false);
    };

    if let Err(e) = form.on_change(&InputChange::new(name, line.trim_end())) {
        log::error!("{}", e);
    }
    form.on_blur(name);

    if let Some(error) = form.field_view(name).error {
        println!("  {error}");
    }
    Ok(true)
}

async fn run(config: LoginConfig) -> std::io::Result<ExitCode> {
    let controller = LoginController::new(HttpAuthenticator::new(config.auth_url));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Sign in");
    loop {
        if !read_field(&controller, &mut input, EMAIL_FIELD, "Email").await? {
            return Ok(ExitCode::FAILURE);
        }
        if !read_field(&controller, &mut input, PASSWORD_FIELD, "Password").await? {
            return Ok(ExitCode::FAILURE);
        }

        let Some(handle) = controller.submit() else {
            for name in [EMAIL_FIELD, PASSWORD_FIELD] {
                if let Some(error) = controller.form().field_view(name).error {
                    println!("  {name}: {error}");
                }
            }
            continue;
        };

        println!("Signing in...");
        if let Err(e) = handle.await {
            log::error!("authentication task failed: {}", e);
        }

        return Ok(match controller.status() {
            AuthStatus::Success => {
                println!("Signed in.");
                ExitCode::SUCCESS
            }
            _ => {
                println!("Sign in failed.");
                ExitCode::FAILURE
            }
        });
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match LoginConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.log_file, LevelFilter::Debug) {
        eprintln!("Error: failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }
    log::info!("auth endpoint: {}", config.auth_url);

    match run(config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
