use std::io;
use std::io::Write;
use std::time;


pub trait ProgressSink {
	fn update(&mut self, inow: usize, n: Option<usize>);
	fn finish(&mut self, inow: usize);
}


/// Rate meter which keeps rewriting a single terminal line.
pub struct ProgressMeter<W: Write> {
	w: W,
	t0: time::Instant,
	tprev: time::Instant,
	iprev: usize,
}

impl<W: Write> ProgressMeter<W> {
	pub fn new(w: W) -> Self {
		let now = time::Instant::now();
		Self{
			w,
			t0: now,
			tprev: now,
			iprev: 0,
		}
	}

	pub fn into_inner(self) -> W {
		self.w
	}
}

// Write errors are ignored.
impl<W: Write> ProgressSink for ProgressMeter<W> {
	fn update(&mut self, inow: usize, n: Option<usize>) {
		let now = time::Instant::now();
		let dt = (now - self.tprev).as_secs_f64();
		let rate = inow.saturating_sub(self.iprev) as f64 / dt;
		let _ = match n {
			Some(n) if n > 0 => {
				let done = (inow as f64) / (n as f64);
				write!(self.w, "{:6.0}% [{:6.2}/s]\r", done * 100.0, rate)
			},
			_ => write!(self.w, "{:12} [{:6.2}/s]\r", inow, rate),
		};
		let _ = self.w.flush();
		self.iprev = inow;
		self.tprev = now;
	}

	fn finish(&mut self, inow: usize) {
		let dt = (time::Instant::now() - self.t0).as_secs_f64();
		let rate = inow as f64 / dt;
		let _ = writeln!(self.w, "{:12} [{:6.2}/s]", inow, rate);
		let _ = self.w.flush();
	}
}


pub struct NullSink;

impl ProgressSink for NullSink {
	fn update(&mut self, _inow: usize, _n: Option<usize>) {}
	fn finish(&mut self, _inow: usize) {}
}


/// Progress on stderr if it is a terminal, nothing otherwise. stdout is
/// reserved for the report itself.
pub fn default_output() -> Box<dyn ProgressSink> {
	if isatty::stderr_isatty() {
		Box::new(ProgressMeter::new(io::stderr()))
	} else {
		Box::new(NullSink)
	}
}
