use lambda_http::{Body, Error, Request, RequestExt, Response};
use weather_core::{CurrentWeatherSource, ProxyResponse, handle_request};

/// Serve one API Gateway invocation.
pub(crate) async fn function_handler<S>(source: &S, event: Request) -> Result<Response<Body>, Error>
where
    S: CurrentWeatherSource + ?Sized,
{
    let city = event.query_string_parameters_ref().and_then(|params| params.first("city"));

    let reply = handle_request(source, city).await;
    into_response(reply)
}

fn into_response(reply: ProxyResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(reply.status_code);
    for (name, value) in &reply.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let resp = builder.body(Body::from(reply.body)).map_err(Box::new)?;
    Ok(resp)
}
