use crate::{
    domain::contact::{models::submission::SellerContactRequest, ports::ContactService},
    inbound::http::{errors::AppError, responses::ApiResponse, state::SharedContactState},
};
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "Receiving a seller inquiry",
    skip(request, state),
    fields(
        contact_email = %request.email,
        contact_name = %request.name,
        product_id = %request.product_id,
    )
)]
pub async fn contact_seller<CS: ContactService>(
    request: web::Json<SellerContactRequest>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    state.contact_service().submit_seller(request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Seller message sent successfully.")))
}
