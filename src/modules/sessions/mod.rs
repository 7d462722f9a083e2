pub mod controller;
pub mod mapper;
pub mod model;
pub mod router;
pub mod service;
