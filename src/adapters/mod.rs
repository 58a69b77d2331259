pub mod data_generator;
pub mod operation_mocker;
pub mod schema_analyzer;
pub mod type_resolver;
pub mod value_generator;
