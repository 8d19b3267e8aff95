pub mod typefully;
