mod codec_ops;
mod config_ops;
mod link_ops;

pub use codec_ops::{decode_code, encode_share_id, slug};
pub use config_ops::{config_generate, config_show};
pub use link_ops::{link, resolve};
