pub mod app;
pub mod carousel;
pub mod gesture_readout;
pub mod swipe_list;
pub mod swipe_pad;
