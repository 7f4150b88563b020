//! Android bootstrap for `rustls-platform-verifier`, which reaches the system trust store through
//! JNI and needs the JVM and application context before the first TLS handshake.

use std::{error::Error, sync::OnceLock};

use jni::sys::{jint, jsize, JavaVM};

static JAVA_VM: OnceLock<jni::JavaVM> = OnceLock::new();

type JniGetCreatedJavaVms =
    unsafe extern "system" fn(vm_buf: *mut *mut JavaVM, buf_len: jsize, n_vms: *mut jsize) -> jint;
const JNI_GET_JAVA_VMS_NAME: &[u8] = b"JNI_GetCreatedJavaVMs";

/// Initialize the platform verifier once per process. Failures are logged, TLS connections will
/// then fail with a verifier error.
pub(crate) fn init() {
    static ANDROID_INIT: std::sync::Once = std::sync::Once::new();

    fn init_inner() -> Result<(), Box<dyn Error>> {
        let jvm = java_vm()?;
        let mut env = jvm.attach_current_thread_permanently()?;
        init_verifier(&mut env)?;
        Ok(())
    }

    ANDROID_INIT.call_once(|| {
        if let Err(e) = init_inner() {
            tracing::error!("Failed to initialize Android support: {e}");
        }
    });
}

fn init_verifier(env: &mut jni::JNIEnv<'_>) -> jni::errors::Result<()> {
    let activity_thread = env
        .call_static_method(
            "android/app/ActivityThread",
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )?
        .l()?;

    let context = env
        .call_method(
            &activity_thread,
            "getApplication",
            "()Landroid/app/Application;",
            &[],
        )?
        .l()?;

    rustls_platform_verifier::android::init_hosted(env, context)
}

fn java_vm() -> Result<&'static jni::JavaVM, Box<dyn Error>> {
    if let Some(jvm) = JAVA_VM.get() {
        return Ok(jvm);
    }

    // The library is loaded by the host app, so the JVM is already running in this process.
    let lib = libloading::os::unix::Library::this();
    let get_created_java_vms: JniGetCreatedJavaVms = unsafe { *lib.get(JNI_GET_JAVA_VMS_NAME)? };

    let mut java_vms: [*mut JavaVM; 1] = [std::ptr::null_mut()];
    let mut vm_count: jsize = 0;

    let ok = unsafe { get_created_java_vms(java_vms.as_mut_ptr(), 1, &mut vm_count) };
    if ok != jni::sys::JNI_OK {
        return Err("Failed to get JavaVM".into());
    }
    if vm_count != 1 {
        return Err(format!("Invalid JavaVM count: {vm_count}").into());
    }

    let jvm = unsafe { jni::JavaVM::from_raw(java_vms[0]) }?;
    Ok(JAVA_VM.get_or_init(|| jvm))
}
