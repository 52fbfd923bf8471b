//! Growable GPU buffer for per-frame data.

use std::marker::PhantomData;

/// Capacity in elements needed to hold `needed` when `current` is too
/// small: double the need, and never less than `current + 16`.
fn grown_capacity(needed: usize, current: usize) -> usize {
    (needed * 2).max(current + 16)
}

/// GPU buffer of `T` that reallocates when a write outgrows it.
///
/// The buffer never shrinks. A reallocation invalidates bind groups that
/// reference it, which [`write`](Self::write) reports.
pub struct DynamicBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _element: PhantomData<T>,
}

impl<T: bytemuck::Pod> DynamicBuffer<T> {
    /// Buffer with room for `capacity` elements (at least one).
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, label, capacity, usage),
            capacity,
            len: 0,
            usage,
            label: label.to_owned(),
            _element: PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * size_of::<T>()) as wgpu::BufferAddress,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Upload `data` from offset zero. Returns `true` when the buffer was
    /// reallocated.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) -> bool {
        let reallocated = data.len() > self.capacity;
        if reallocated {
            self.capacity = grown_capacity(data.len(), self.capacity);
            self.buffer = Self::allocate(device, &self.label, self.capacity, self.usage);
            log::debug!("{} grown to {} elements", self.label, self.capacity);
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.len = data.len();
        reallocated
    }

    /// Underlying wgpu buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Elements written by the last `write`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the last `write` was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
