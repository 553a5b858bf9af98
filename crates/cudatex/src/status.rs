use crate::error::{CallSite, GpuError, Result};
use crate::runtime::RuntimeApi;

/// Status code returned by every native runtime call.
///
/// Opaque except for the reserved success value; the set of failure
/// values belongs to the runtime and is open-ended.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CudaStatus(i32);

impl CudaStatus {
    pub const SUCCESS: CudaStatus = CudaStatus(0);

    pub fn new(raw: i32) -> Self {
        CudaStatus(raw)
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

/// Translate a native status into the structured error mechanism.
///
/// Success is a strict no-op: no allocation, no logging, no call back
/// into the runtime — this sits on the hot path of every API call. Any
/// other status yields exactly one [`GpuError::ApiCall`] carrying the
/// runtime's description of the code and the supplied call site. Failures
/// are terminal at this layer; nothing is retried.
pub fn check_status<R: RuntimeApi + ?Sized>(
    rt: &R,
    status: CudaStatus,
    site: CallSite,
) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(GpuError::ApiCall {
        code: status.raw(),
        description: rt.error_string(status),
        function: site.function,
        file: site.file,
        line: site.line,
    })
}

/// Path of the enclosing function as a `&'static str`.
#[doc(hidden)]
#[macro_export]
macro_rules! function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}

/// Check a status-returning runtime call, capturing the call site (file,
/// line, enclosing function) automatically.
///
/// ```ignore
/// cuda_check!(rt, rt.bind_texture_2d(tex, desc, ptr, w, h, stride))?;
/// ```
#[macro_export]
macro_rules! cuda_check {
    ($rt:expr, $status:expr) => {
        $crate::status::check_status(
            $rt,
            $status,
            $crate::error::CallSite {
                function: $crate::function_path!(),
                file: file!(),
                line: line!(),
            },
        )
    };
}
