//! Forward pass drawing every queued primitive.
//!
//! One mesh per primitive is uploaded at startup. Each frame the queued
//! model matrices are written into a storage buffer and every draw picks
//! its matrix through the instance index.

use glam::Mat4;
use wgpu::util::DeviceExt;

use super::mesh::{vertex_buffer_layout, GpuMesh};
use super::{pipeline_util, PrimitiveRenderer};
use crate::camera::core::CameraUniform;
use crate::error::BusViewError;
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, PRIMITIVE_SHADER};
use crate::gpu::texture::DepthTexture;
use crate::scene::{BusScene, PrimitiveId};

/// Initial model-matrix capacity, enough for the exterior in one frame.
const INITIAL_DRAWS: usize = 256;

/// wgpu renderer for the bus scene.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    meshes: Vec<GpuMesh>,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    model_layout: wgpu::BindGroupLayout,
    model_buffer: DynamicBuffer<[[f32; 4]; 4]>,
    model_bind_group: wgpu::BindGroup,
    depth: DepthTexture,
    queued: Vec<(PrimitiveId, Mat4)>,
}

impl SceneRenderer {
    /// Upload every primitive of `scene` and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`BusViewError::Shader`] if the primitive shader fails to
    /// compose.
    pub fn new(context: &RenderContext, scene: &BusScene) -> Result<Self, BusViewError> {
        let device = &context.device;

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_layout = pipeline_util::single_buffer_layout(
            device,
            "Camera Bind Group Layout",
            wgpu::BufferBindingType::Uniform,
        );
        let camera_bind_group = pipeline_util::single_buffer_bind_group(
            device,
            "Camera Bind Group",
            &camera_layout,
            &camera_buffer,
        );

        let model_layout = pipeline_util::single_buffer_layout(
            device,
            "Model Bind Group Layout",
            wgpu::BufferBindingType::Storage { read_only: true },
        );
        let model_buffer = DynamicBuffer::new(
            device,
            "Model Matrices",
            INITIAL_DRAWS,
            wgpu::BufferUsages::STORAGE,
        );
        let model_bind_group = pipeline_util::single_buffer_bind_group(
            device,
            "Model Bind Group",
            &model_layout,
            model_buffer.buffer(),
        );

        let mut composer = ShaderComposer::new()?;
        let shader =
            composer.compose(device, "Primitive Shader", PRIMITIVE_SHADER, "raster/primitive.wgsl")?;
        let pipeline = create_pipeline(context, &shader, &[&camera_layout, &model_layout]);

        let meshes = scene
            .primitives()
            .iter()
            .enumerate()
            .map(|(i, p)| GpuMesh::upload(device, &format!("Primitive {i}"), &p.mesh()))
            .collect::<Vec<_>>();
        log::debug!("Uploaded {} primitive meshes", meshes.len());

        let (width, height) = context.size();
        Ok(Self {
            pipeline,
            meshes,
            camera_buffer,
            camera_bind_group,
            model_layout,
            model_buffer,
            model_bind_group,
            depth: DepthTexture::new(device, width, height),
            queued: Vec::new(),
        })
    }

    /// Recreate the depth attachment after a surface resize.
    pub fn resize(&mut self, context: &RenderContext) {
        let (width, height) = context.size();
        self.depth = DepthTexture::new(&context.device, width, height);
    }

    /// Upload the camera uniform for the next frame.
    pub fn update_camera(&self, queue: &wgpu::Queue, uniform: &CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[*uniform]));
    }

    /// Clear `target` to `clear_color` and draw every queued primitive.
    pub fn render(
        &mut self,
        context: &RenderContext,
        target: &wgpu::TextureView,
        clear_color: [f32; 3],
    ) {
        let models: Vec<[[f32; 4]; 4]> = self
            .queued
            .iter()
            .map(|(_, model)| model.to_cols_array_2d())
            .collect();
        if self
            .model_buffer
            .write(&context.device, &context.queue, &models)
        {
            self.model_bind_group = pipeline_util::single_buffer_bind_group(
                &context.device,
                "Model Bind Group",
                &self.model_layout,
                self.model_buffer.buffer(),
            );
        }

        let mut encoder = context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(clear_color[0]),
                            g: f64::from(clear_color[1]),
                            b: f64::from(clear_color[2]),
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_bind_group(1, &self.model_bind_group, &[]);
            for (instance, (id, _)) in self.queued.iter().enumerate() {
                let Some(mesh) = self.meshes.get(id.0 as usize) else {
                    continue;
                };
                let instance = instance as u32;
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, instance..instance + 1);
            }
        }
        context.submit(encoder);
        self.queued.clear();
    }
}

impl PrimitiveRenderer for SceneRenderer {
    fn draw(&mut self, primitive: PrimitiveId, model: Mat4) {
        self.queued.push((primitive, model));
    }
}

fn create_pipeline(
    context: &RenderContext,
    shader: &wgpu::ShaderModule,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let pipeline_layout = context
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Primitive Pipeline Layout"),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Primitive Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::surface_fragment_targets(context.format()),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Cube and spoke windings are mixed
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
