/// Server construction.
///
/// The route table below is the single place where each route's allowed-role
/// set is declared; `AuthMiddleware` enforces it (401 unauthenticated, 403
/// wrong role) before any handler runs.

use actix_web::dev::Server;
use actix_web::{guard, web, App, HttpServer};
use std::net::TcpListener;

use crate::auth::{ADMIN_ONLY, RECRUITER_ONLY, STAFF, STUDENT_ONLY};
use crate::configuration::JwtSettings;
use crate::logger::RequestLogger;
use crate::middleware::AuthMiddleware;
use crate::routes::{
    add_course, apply_to_job, complete_skill, create_job, create_recruiter_profile,
    create_student_profile, delete_course, delete_job, get_analytics, get_recruiter_profile,
    get_student_profile, health_check, init_data, list_all_users, list_courses, list_jobs,
    login, my_applications, register, root, search_students, update_course, verify_user,
};
use crate::store::Store;

pub fn run(
    listener: TcpListener,
    store: Store,
    jwt_config: JwtSettings,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let jwt_config_data = web::Data::new(jwt_config.clone());

    let server = HttpServer::new(move || {
        let jwt = jwt_config.clone();

        App::new()
            .wrap(RequestLogger)
            .app_data(store.clone())
            .app_data(jwt_config_data.clone())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("", web::get().to(root))
                    // Public: account lifecycle and read-only catalogs
                    .service(
                        web::scope("/auth")
                            .route("/register", web::post().to(register))
                            .route("/login", web::post().to(login)),
                    )
                    .route("/courses", web::get().to(list_courses))
                    // Jobs: listing is public; posting is recruiter/admin,
                    // applying is student
                    .service(
                        web::resource("/jobs")
                            .guard(guard::Post())
                            .wrap(AuthMiddleware::allow(jwt.clone(), STAFF))
                            .to(create_job),
                    )
                    .service(
                        web::resource("/jobs")
                            .guard(guard::Get())
                            .to(list_jobs),
                    )
                    .service(
                        web::resource("/jobs/{job_id}/apply")
                            .wrap(AuthMiddleware::allow(jwt.clone(), STUDENT_ONLY))
                            .route(web::post().to(apply_to_job)),
                    )
                    .service(
                        web::scope("/students")
                            .wrap(AuthMiddleware::allow(jwt.clone(), STUDENT_ONLY))
                            .route("/profile", web::post().to(create_student_profile))
                            .route("/profile", web::get().to(get_student_profile))
                            .route(
                                "/complete-skill/{skill_name}",
                                web::post().to(complete_skill),
                            )
                            .route("/applications", web::get().to(my_applications)),
                    )
                    .service(
                        web::scope("/recruiters")
                            .wrap(AuthMiddleware::allow(jwt.clone(), RECRUITER_ONLY))
                            .route("/profile", web::post().to(create_recruiter_profile))
                            .route("/profile", web::get().to(get_recruiter_profile))
                            .route("/search-students", web::post().to(search_students)),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(AuthMiddleware::allow(jwt.clone(), ADMIN_ONLY))
                            .route("/init-data", web::post().to(init_data))
                            .route("/courses", web::post().to(add_course))
                            .route("/courses/{course_id}", web::put().to(update_course))
                            .route("/courses/{course_id}", web::delete().to(delete_course))
                            .route("/jobs/{job_id}", web::delete().to(delete_job))
                            .route("/users", web::get().to(list_all_users))
                            .route("/users/{user_id}/verify", web::put().to(verify_user))
                            .route("/analytics", web::get().to(get_analytics)),
                    ),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
