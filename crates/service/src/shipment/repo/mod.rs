pub mod seaorm;

pub use seaorm::SeaOrmShipmentRepository;
