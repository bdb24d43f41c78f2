mod acceptance;
mod factory_config;
