#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use twin_cfg as cfg;
pub use twin_doc as doc;
pub use twin_serial as serial;
pub use twin_utils as utils;
