pub mod waveform_canvas;
