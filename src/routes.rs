use crate::{
    api::{attendance, contract, dashboard, employee, leave_request, payroll},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use tracing::warn;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_else(|| {
            warn!(requests_per_min, "Rejected rate limit, falling back to defaults");
            GovernorConfig::default()
        });
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Public routes
    cfg.service(
        web::scope("/auth").service(
            web::resource("/login")
                .wrap(build_limiter(config.rate_login_per_min))
                .route(web::post().to(handlers::login)),
        ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(build_limiter(config.rate_protected_per_min)) // rate limiting
            .service(web::resource("/auth/register").route(web::post().to(handlers::register)))
            .service(
                web::scope("/employee")
                    // /employee
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employee/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::get().to(attendance::list_tallies))
                            .route(web::delete().to(attendance::reset_attendance)),
                    )
                    // /attendance/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(attendance::get_tally))
                            .route(web::put().to(attendance::set_tally)),
                    )
                    // /attendance/{employee_id}/mark
                    .service(
                        web::resource("/{employee_id}/mark")
                            .route(web::post().to(attendance::mark_attendance)),
                    ),
            )
            .service(
                web::scope("/payroll")
                    // /payroll
                    .service(web::resource("").route(web::get().to(payroll::list_payrolls)))
                    .service(
                        web::resource("/recalculate")
                            .route(web::post().to(payroll::recalculate_payroll)),
                    )
                    .service(web::resource("/sync").route(web::post().to(payroll::sync_payroll)))
                    .service(
                        web::resource("/process")
                            .route(web::post().to(payroll::process_all_payroll)),
                    )
                    // /payroll/{employee_id}/...
                    .service(
                        web::resource("/{employee_id}/process")
                            .route(web::post().to(payroll::process_payroll)),
                    )
                    .service(
                        web::resource("/{employee_id}/fail")
                            .route(web::post().to(payroll::fail_payroll)),
                    )
                    .service(
                        web::resource("/{employee_id}/retry")
                            .route(web::post().to(payroll::retry_payroll)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::scope("/contract")
                    .service(
                        web::resource("")
                            .route(web::get().to(contract::list_contracts))
                            .route(web::post().to(contract::create_contract)),
                    )
                    .service(
                        web::resource("/{id}/sign").route(web::put().to(contract::sign_contract)),
                    )
                    .service(
                        web::resource("/{id}/terminate")
                            .route(web::put().to(contract::terminate_contract)),
                    ),
            )
            .service(web::resource("/dashboard/stats").route(web::get().to(dashboard::stats))),
    );
}

// LOGIN
//  └─ access_token (ACCESS_TOKEN_TTL seconds)

// API REQUEST
//  └─ Authorization: Bearer access_token

// ACCESS EXPIRED
//  └─ POST /auth/login again
