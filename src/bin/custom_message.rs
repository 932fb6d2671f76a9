use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use user_auth::logging::setup_logging;
use user_auth::trigger::{CustomMessageEvent, MessageTemplate, customize};

async fn function_handler(
    event: LambdaEvent<CustomMessageEvent>,
    template: &MessageTemplate,
) -> Result<CustomMessageEvent, Error> {
    let LambdaEvent { payload, context } = event;
    tracing::debug!(request_id = %context.request_id, "Handling custom message trigger");

    Ok(customize(payload, template)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging();

    let template = MessageTemplate::from_env();
    let template = &template;

    run(service_fn(move |event| async move {
        function_handler(event, template).await
    }))
    .await
}
