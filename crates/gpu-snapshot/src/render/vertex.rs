use bytemuck::{Pod, Zeroable};

use crate::resource::VertexBufferFormat;

// ── path vertex ───────────────────────────────────────────────────────────

/// Vertex of [`VertexBufferFormat::F2Ub4F2`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PathVertex {
    pub pos: [f32; 2],
    pub color: [u8; 4],
    pub obj: [f32; 2],
}

impl PathVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Unorm8x4,  // color
        2 => Float32x2  // obj
    ];
}

// ── fill vertex ───────────────────────────────────────────────────────────

/// Vertex of [`VertexBufferFormat::F2Ub4F2F2F28`].
///
/// `data` packs seven vec4 of per-quad fill parameters (gradient stops,
/// border radii, pattern info) interpreted by the fill shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FillVertex {
    pub pos: [f32; 2],
    pub color: [u8; 4],
    pub tex: [f32; 2],
    pub obj: [f32; 2],
    pub data: [f32; 28],
}

impl FillVertex {
    const ATTRS: [wgpu::VertexAttribute; 11] = wgpu::vertex_attr_array![
        0 => Float32x2,  // pos
        1 => Unorm8x4,   // color
        2 => Float32x2,  // tex
        3 => Float32x2,  // obj
        4 => Float32x4,  // data0
        5 => Float32x4,  // data1
        6 => Float32x4,  // data2
        7 => Float32x4,  // data3
        8 => Float32x4,  // data4
        9 => Float32x4,  // data5
        10 => Float32x4  // data6
    ];
}

const _: () = {
    assert!(size_of::<PathVertex>() == VertexBufferFormat::F2Ub4F2.stride());
    assert!(size_of::<FillVertex>() == VertexBufferFormat::F2Ub4F2F2F28.stride());
};

/// Per-vertex buffer layout for `format`.
pub fn vertex_buffer_layout(format: VertexBufferFormat) -> wgpu::VertexBufferLayout<'static> {
    let attributes: &'static [wgpu::VertexAttribute] = match format {
        VertexBufferFormat::F2Ub4F2 => &PathVertex::ATTRS,
        VertexBufferFormat::F2Ub4F2F2F28 => &FillVertex::ATTRS,
    };

    wgpu::VertexBufferLayout {
        array_stride: format.stride() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}
