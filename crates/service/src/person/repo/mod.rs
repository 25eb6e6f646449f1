pub mod seaorm;

pub use seaorm::SeaOrmPersonRepository;
