pub mod distance;
pub mod distance_matrix;
pub mod init_map;
pub mod synthetic;
