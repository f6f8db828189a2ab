use crate::{
    domain::contact::{models::submission::GeneralContactRequest, ports::ContactService},
    inbound::http::{errors::AppError, responses::ApiResponse, state::SharedContactState},
};
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "Receiving a general inquiry",
    skip(request, state),
    fields(
        contact_email = %request.email,
        contact_name = %request.name,
    )
)]
pub async fn contact<CS: ContactService>(
    request: web::Json<GeneralContactRequest>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    state.contact_service().submit_general(request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "General inquiry submitted successfully.",
    )))
}
