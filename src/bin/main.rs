#[cfg(not(target_arch = "wasm32"))]
mod native {
    extern crate catalog;

    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use catalog::config::{bind_addr, Settings};

    mod adapter {
        use actix_web::HttpRequest;
        use spin_sdk::http::{Method, Request};

        pub fn actix_to_spin_request(
            req: &HttpRequest,
            body: actix_web::web::Bytes,
        ) -> anyhow::Result<Request> {
            let method = match req.method().as_str() {
                "GET" => Method::Get,
                "POST" => Method::Post,
                "PUT" => Method::Put,
                "DELETE" => Method::Delete,
                "HEAD" => Method::Head,
                "OPTIONS" => Method::Options,
                "PATCH" => Method::Patch,
                other => anyhow::bail!("unsupported method {}", other),
            };

            let uri = req.uri().to_string();

            let mut builder = Request::builder();
            builder.method(method).uri(&uri);
            for (name, value) in req.headers() {
                if let Ok(val_str) = value.to_str() {
                    builder.header(name.as_str(), val_str);
                }
            }

            Ok(builder.body(body.to_vec()).build())
        }

        pub fn spin_to_actix_response(spin_resp: spin_sdk::http::Response) -> actix_web::HttpResponse {
            let status = *spin_resp.status();

            let mut response = actix_web::HttpResponse::build(
                actix_web::http::StatusCode::from_u16(status)
                    .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR),
            );
            for (name, value) in spin_resp.headers() {
                if let Some(val_str) = value.as_str() {
                    response.append_header((name.to_string(), val_str.to_string()));
                }
            }

            response.body(spin_resp.body().to_vec())
        }
    }

    pub async fn run() -> std::io::Result<()> {
        catalog::init_logging();

        let settings = Settings::from_env();
        let addr = bind_addr();
        tracing::info!(
            %addr,
            exec_ed_inclusion = settings.flags.exec_ed_inclusion,
            alacarte_title = %settings.catalog.edx_enterprise_alacarte_title,
            "catalog server listening"
        );

        let data = web::Data::new(settings);
        HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::route().to(handle_all))
        })
        .bind(addr)?
        .run()
        .await
    }

    async fn handle_all(
        req: HttpRequest,
        body: web::Bytes,
        settings: web::Data<Settings>,
    ) -> HttpResponse {
        let spin_req = match adapter::actix_to_spin_request(&req, body) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "rejected request");
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({"error": "Invalid request"}));
            }
        };

        adapter::spin_to_actix_response(catalog::route(&spin_req, &settings))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    native::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
