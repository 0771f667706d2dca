#[cfg(target_arch = "wasm32")]
pub fn main() {
    securegate_web::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
