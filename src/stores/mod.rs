pub mod paused_store;
