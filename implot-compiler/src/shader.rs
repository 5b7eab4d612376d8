//! WebGL shaders that plot an implicit curve.
//!
//! The vertex shader maps the corners of a full-screen quad to graph coordinates using the
//! `uScale` and `uOffset` uniforms. The fragment shader samples the compiled expression a small
//! distance (`uWidth`) to each side of the pixel and colours the pixel where the sample changes
//! sign, which draws the curve with a thickness of roughly `2 * uWidth`. The axes are drawn in
//! black on top of the `uSampler` background texture.

use crate::compile;
use implot_parser::node::Node;

/// The vertex shader, which does not depend on the expression.
pub const VERTEX_SHADER: &str = "precision mediump float;
uniform vec2 uScale;
uniform vec2 uOffset;
attribute vec4 aPosition;
varying vec2 vPosition;

void main(void) {
    gl_Position = aPosition;
    vPosition = aPosition.xy * uScale + uOffset;
}
";

/// The part of the fragment shader before the body of `getSample`.
const FRAGMENT_HEADER: &str = "precision mediump float;
uniform sampler2D uSampler;
uniform float uWidth;
varying vec2 vPosition;

float getSample(float x, float y) {
    return ";

/// The part of the fragment shader after the body of `getSample`.
const FRAGMENT_FOOTER: &str = ";
}

void main(void) {
    lowp vec4 color = texture2D(uSampler, vPosition);
    float axisWidth = max(1.0/32.0, uWidth);
    if (abs(vPosition.x) < axisWidth || abs(vPosition.y) < axisWidth) {
        color = vec4(0, 0, 0, 1);
    }

    float leftSample = getSample(vPosition.x - uWidth, vPosition.y);
    float rightSample = getSample(vPosition.x + uWidth, vPosition.y);
    float downSample = getSample(vPosition.x, vPosition.y - uWidth);
    float upSample = getSample(vPosition.x, vPosition.y + uWidth);

    if (leftSample * rightSample < 0.0 || downSample * upSample < 0.0) {
        color = vec4(0, 0, 1, 1);
    }

    gl_FragColor = color;
}
";

/// Returns the source of a fragment shader whose `getSample` function returns the given
/// expression.
///
/// An empty expression samples as `0.0` everywhere, which never changes sign and so plots
/// nothing.
pub fn fragment_shader(code: &str) -> String {
    let code = if code.is_empty() { "0.0" } else { code };
    [FRAGMENT_HEADER, code, FRAGMENT_FOOTER].concat()
}

/// Compiles the tree and embeds it in a fragment shader.
pub fn compile_shader(node: &Node) -> String {
    fragment_shader(&compile(node))
}
