mod engine;
mod error;
mod handler;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};

const SERVICE: &str = "number_classifier";

#[tokio::main]
async fn main() -> Result<(), Error> {
    shared::log::init(SERVICE)?;

    lambda_runtime::run(service_fn(func)).await?;
    Ok(())
}

#[tracing::instrument(skip(event), fields(request_id = %event.context.request_id))]
async fn func(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(handler::handle(&event.payload))
}
