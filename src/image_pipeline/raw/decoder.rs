use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::{RawFrameSpec, SampleGrid};

pub trait FrameDecoder {
    fn decode(&self, data: &[u8], spec: &RawFrameSpec) -> Result<SampleGrid>;
}
