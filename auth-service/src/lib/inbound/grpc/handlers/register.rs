use tonic::Status;

use super::parse_email;
use super::parse_password;
use super::ParseRequestError;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let user_id = service.register(try_into_command(request)?).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}

fn try_into_command(request: RegisterRequest) -> Result<RegisterCommand, ParseRequestError> {
    let email = parse_email(request.email)?;
    let password = parse_password(request.password)?;
    Ok(RegisterCommand::new(email, password))
}
