mod errors;
mod models;
