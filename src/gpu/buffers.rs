//! Vertex buffers that are rewritten every frame.

/// Smallest allocation, in elements.
const MIN_ELEMENTS: u64 = 256;

/// A `VERTEX | COPY_DST` buffer that is reallocated when a frame outgrows it.
pub struct GrowableBuffer {
    buffer: wgpu::Buffer,
    label: &'static str,
    element_size: u64,
    capacity: u64,
}

impl GrowableBuffer {
    pub fn new(device: &wgpu::Device, label: &'static str, element_size: u64) -> Self {
        let capacity = MIN_ELEMENTS * element_size;
        Self {
            buffer: create(device, label, capacity),
            label,
            element_size,
            capacity,
        }
    }

    /// Copy `bytes` to the start of the buffer, growing it first if needed.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let needed = bytes.len() as u64;
        if needed > self.capacity {
            self.capacity = grown_capacity(needed, self.element_size);
            log::debug!("Growing {} to {} bytes", self.label, self.capacity);
            self.buffer = create(device, self.label, self.capacity);
        }
        queue.write_buffer(&self.buffer, 0, bytes);
    }

    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }
}

fn create(device: &wgpu::Device, label: &'static str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Next power-of-two size that holds `needed` bytes, at least
/// [`MIN_ELEMENTS`] elements.
fn grown_capacity(needed: u64, element_size: u64) -> u64 {
    needed.next_power_of_two().max(MIN_ELEMENTS * element_size)
}
