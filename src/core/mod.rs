pub mod controller;
pub mod prober;
pub mod validator;
