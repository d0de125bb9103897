pub mod agent;
pub mod bedrock;
pub mod relay;
