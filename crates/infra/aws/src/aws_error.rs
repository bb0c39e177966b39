use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};
use ec2ctl_core::error::Error;

/// EC2 signals a successful dry run as a service error with this code.
const DRY_RUN_CONFIRMATION_CODE: &str = "DryRunOperation";

pub(crate) fn is_dry_run_confirmation<E>(sdk_error: &SdkError<E>) -> bool
where
    E: ProvideErrorMetadata,
{
    sdk_error
        .as_service_error()
        .and_then(|error| error.code())
        .is_some_and(|code| code == DRY_RUN_CONFIRMATION_CODE)
}

pub(crate) fn map_aws_error<E>(operation_name: &'static str, sdk_error: SdkError<E>) -> Error
where
    E: std::error::Error + Send + Sync + 'static + ProvideErrorMetadata,
{
    match sdk_error {
        SdkError::ServiceError(service_error) => {
            let error = service_error.into_err();
            let code = error.code().unwrap_or_default().to_string();
            let message = error.message().unwrap_or_default().to_string();

            match code.as_str() {
                "AuthFailure" => Error::Authentication,
                "UnauthorizedOperation" | "AccessDenied" | "AccessDeniedException" => {
                    Error::Authorization {
                        operation: operation_name.to_string(),
                    }
                }
                "Throttling" | "ThrottlingException" | "RequestLimitExceeded" => Error::Quota,
                _ if code.ends_with(".NotFound") || code.ends_with(".Malformed") => {
                    Error::NotFound {
                        resource: if message.is_empty() { code } else { message },
                    }
                }
                _ => Error::Unknown {
                    operation_name: operation_name.to_string(),
                    detail: message,
                },
            }
        }

        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Error::Transient {
            operation_name: operation_name.to_string(),
        },

        other => Error::Unknown {
            operation_name: operation_name.to_string(),
            detail: other.to_string(),
        },
    }
}
