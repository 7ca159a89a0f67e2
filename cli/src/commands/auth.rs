use super::{AppContext, FirehoseCommand};
use firehose::auth::log_in;
use firehose::error::{FirehoseError, Result};
use firehose::http::HttpClient;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCommand {
    pub email: Option<String>,
}

fn prompt_email() -> Result<String> {
    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    Ok(email.trim().to_string())
}

impl FirehoseCommand for LoginCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let email = match &self.email {
            Some(email) => email.clone(),
            None => prompt_email()?,
        };
        let password = rpassword::prompt_password("Password: ")?;

        // sign-in goes out without a token
        let http = HttpClient::new(ctx.config)?;
        let token = match log_in(&http, &email, &password) {
            Ok(token) => token,
            Err(err) => {
                eprintln!("{}", err);
                return Err(FirehoseError::Auth(err.to_string()));
            }
        };

        ctx.auth.borrow_mut().set_token(&token)?;
        eprintln!("Logged in as {}", email);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutCommand;

impl FirehoseCommand for LogoutCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let mut auth = ctx.auth.borrow_mut();
        if !auth.is_logged_in() {
            eprintln!("Not logged in.");
            return Ok(());
        }
        auth.clear_token()?;
        eprintln!("Logged out.");
        Ok(())
    }
}
