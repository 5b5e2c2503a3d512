pub mod seaorm;

pub use seaorm::SeaOrmEmployeeRepository;
