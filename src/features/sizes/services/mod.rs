mod size_service;

pub use size_service::SizeService;
