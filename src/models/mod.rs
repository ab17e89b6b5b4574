pub mod paused;
pub mod torrent;
