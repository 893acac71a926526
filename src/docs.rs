use utoipa::openapi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::advance::RecordAdvance;
use crate::api::attendance::{MarkAttendance, UpdateAttendance};
use crate::api::site::CreateSite;
use crate::api::worker::CreateWorker;
use crate::model::advance::AdvanceEntry;
use crate::model::attendance::{AttendanceEntry, AttendanceStatus};
use crate::model::site::Site;
use crate::model::user::User;
use crate::model::worker::Worker;
use crate::models::{LoginReq, RegisterReq, TokenResponse};
use crate::salary::SalarySummary;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi
            .components
            .as_mut()
            .expect("OpenAPI components missing");
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Worksite Manager API",
        version = "1.0.0",
        description = r#"
## Worksite Manager

Multi-tenant backend for construction-worksite crews: workers, daily
attendance, cash advances, and derived salary summaries.

### 🔹 Key Features
- **Sites & Workers**
  - Each user manages their own sites and workers
- **Attendance**
  - One entry per worker and date; re-marking overwrites
- **Advances**
  - Cash advances accumulate per worker
- **Salary**
  - Payable summary derived from attendance and advances over a date range

### 🔐 Security
All `/api` endpoints require **JWT Bearer authentication**. Workers are only
visible to the user who created them.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,

        crate::api::site::create_site,
        crate::api::site::list_sites,

        crate::api::worker::create_worker,
        crate::api::worker::list_workers,
        crate::api::worker::get_worker,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::update_attendance,

        crate::api::advance::record_advance,
        crate::api::advance::list_advances,

        crate::api::salary::calculate_salary
    ),
    components(
        schemas(
            RegisterReq,
            LoginReq,
            TokenResponse,
            User,
            Site,
            CreateSite,
            Worker,
            CreateWorker,
            MarkAttendance,
            UpdateAttendance,
            AttendanceEntry,
            AttendanceStatus,
            RecordAdvance,
            AdvanceEntry,
            SalarySummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Sites", description = "Site management APIs"),
        (name = "Workers", description = "Worker management APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
        (name = "Advances", description = "Cash advance ledger APIs"),
        (name = "Salary", description = "Derived salary summaries"),
    )
)]
pub struct ApiDoc;
