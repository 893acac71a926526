use crate::{
    api::{advance, attendance, salary, site, worker},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/register")
                    .wrap(register_limiter.clone())
                    .route(web::post().to(handlers::register)),
            ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(
                web::scope("/sites").service(
                    web::resource("")
                        .route(web::post().to(site::create_site))
                        .route(web::get().to(site::list_sites)),
                ),
            )
            .service(
                web::scope("/workers")
                    // /workers
                    .service(
                        web::resource("")
                            .route(web::post().to(worker::create_worker))
                            .route(web::get().to(worker::list_workers)),
                    )
                    // /workers/{worker_id}
                    .service(
                        web::resource("/{worker_id}").route(web::get().to(worker::get_worker)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("").route(web::post().to(attendance::mark_attendance)),
                    )
                    // /attendance/{id}: GET is keyed by worker, PUT by entry
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(attendance::list_attendance))
                            .route(web::put().to(attendance::update_attendance)),
                    ),
            )
            .service(
                web::scope("/advances")
                    .service(web::resource("").route(web::post().to(advance::record_advance)))
                    .service(
                        web::resource("/{worker_id}")
                            .route(web::get().to(advance::list_advances)),
                    ),
            )
            .service(
                web::scope("/salary").service(
                    web::resource("/{worker_id}")
                        .route(web::get().to(salary::calculate_salary)),
                ),
            ),
    );
}
