mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod admin_login;
pub use admin_login::AdminLogin;

mod admin;
pub use admin::Admin;

mod pi;
pub use pi::PiDashboard;

mod projects;
pub use projects::Projects;

mod unauthorized;
pub use unauthorized::Unauthorized;
