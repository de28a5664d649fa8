use crate::gl33::GL33;
use prism::backend::pipeline::Pipeline;

unsafe impl Pipeline for GL33 {
  unsafe fn clear(&mut self, color: [f32; 4]) {
    let mut state = self.state.borrow_mut();

    if state.symbols_loaded() {
      state.set_clear_color(color);
      gl::Clear(gl::COLOR_BUFFER_BIT);
    }
  }

  unsafe fn use_program(&mut self, program: &Self::ProgramRepr) {
    self.state.borrow_mut().use_program(program.handle);
  }
}
