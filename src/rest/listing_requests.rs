use crate::form::ListingRequestForm;
use crate::rest::error::RestApiError;
use crate::service::listing::{ListingIntake, SubmitError};
use actix_web::post;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use deadpool_sqlite::Pool;
use tracing::error;

#[post("")]
pub async fn post(
    args: Json<ListingRequestForm>,
    intake: Data<ListingIntake>,
    pool: Data<Pool>,
) -> Result<HttpResponse, RestApiError> {
    match intake.submit(&args, &pool).await {
        Ok(submission) => Ok(HttpResponse::Created().json(submission)),
        Err(SubmitError::Invalid(errors)) => Err(errors.into()),
        Err(SubmitError::Forward { id, message }) => Err(RestApiError::upstream(format!(
            "Listing request {id} was saved but not forwarded: {message}"
        ))),
        Err(SubmitError::Internal(e)) => {
            error!(error = %e, "Failed to save listing request");
            Err(RestApiError::database())
        }
    }
}

#[cfg(test)]
mod test {
    use crate::db;
    use crate::form::ListingRequestForm;
    use crate::rest::error::RestApiErrorBody;
    use crate::service::listing::test::mock_intake;
    use crate::service::listing::{ListingIntake, Submission};
    use crate::service::postal::test::mock_lookup;
    use crate::service::postal::PostalLookup;
    use crate::Result;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web::{scope, Data};
    use actix_web::{test, App};

    async fn call(form: ListingRequestForm) -> Result<actix_web::dev::ServiceResponse> {
        let intake = ListingIntake::new(mock_intake()?, PostalLookup::new(mock_lookup()?)?)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(intake))
                .app_data(Data::new(db::test::pool().await))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post().uri("/").set_json(form).to_request();
        Ok(test::call_service(&app, req).await)
    }

    #[test]
    async fn post() -> Result<()> {
        let res = call(ListingRequestForm::mock()).await?;
        assert_eq!(StatusCode::CREATED, res.status());
        let res: Submission = test::read_body_json(res).await;
        assert!(res.forwarded);
        assert_eq!("岩手県西磐井郡平泉町平泉", res.address);
        Ok(())
    }

    #[test]
    async fn post_invalid_postal_code() -> Result<()> {
        let res = call(ListingRequestForm {
            postal_code: "12-34".into(),
            ..ListingRequestForm::mock()
        })
        .await?;
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        let res: RestApiErrorBody = test::read_body_json(res).await;
        assert!(res.fields.iter().any(|it| it.field == "postal_code"));
        Ok(())
    }

    #[test]
    async fn post_rejected_upstream() -> Result<()> {
        let res = call(ListingRequestForm {
            name: "reject".into(),
            ..ListingRequestForm::mock()
        })
        .await?;
        assert_eq!(StatusCode::BAD_GATEWAY, res.status());
        let res: RestApiErrorBody = test::read_body_json(res).await;
        assert_eq!("upstream", res.code);
        Ok(())
    }
}
