use tonic::Status;

use super::parse_email;
use super::parse_password;
use super::ParseRequestError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let token = service.login(try_into_command(request)?).await?;

    Ok(LoginResponse { token })
}

fn try_into_command(request: LoginRequest) -> Result<LoginCommand, ParseRequestError> {
    let email = parse_email(request.email)?;
    let password = parse_password(request.password)?;

    if request.app_id == 0 {
        return Err(ParseRequestError::MissingAppId);
    }

    Ok(LoginCommand::new(email, password, AppId(request.app_id)))
}
