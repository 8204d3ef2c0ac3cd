// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

pub mod aabb;
pub mod circle;
pub mod cylinder;
pub mod frame;
pub mod line;
pub mod matrix;
pub mod oriented_box;
pub mod plane;
pub mod quaternion;
pub mod ray;
pub mod segment;
pub mod triangle;
pub mod vector;

pub use aabb::{
    AxisAlignedBox, AxisAlignedBox2, AxisAlignedBox2d, AxisAlignedBox2f, AxisAlignedBox3,
    AxisAlignedBox3d, AxisAlignedBox3f, AxisAlignedBox3i,
};
pub use circle::{Circle2, Circle2d, Circle2f, Circle3, Circle3d, Circle3f};
pub use cylinder::{Cylinder3, Cylinder3d, Cylinder3f};
pub use frame::{Frame3, Frame3d, Frame3f};
pub use line::{Line, Line2, Line2d, Line2f, Line3, Line3d, Line3f};
pub use matrix::{
    Matrix, Matrix2, Matrix2d, Matrix2f, Matrix3, Matrix3d, Matrix3f, Matrix4, Matrix4d, Matrix4f,
};
pub use oriented_box::{Box2, Box2d, Box2f, Box3, Box3d, Box3f, OrientedBox, ScaleMode};
pub use plane::{Plane3, Plane3d, Plane3f};
pub use quaternion::{Quaternion, Quaterniond, Quaternionf};
pub use ray::{Ray, Ray2, Ray3, Ray3d, Ray3f};
pub use segment::{Segment, Segment2, Segment2d, Segment2f, Segment3, Segment3d, Segment3f};
pub use triangle::{Triangle, Triangle2, Triangle2d, Triangle2f, Triangle3, Triangle3d, Triangle3f};
pub use vector::{
    Vector, Vector2, Vector2d, Vector2f, Vector3, Vector3d, Vector3f, Vector4, Vector4d, Vector4f,
};
