use posture_base::Tensor;
use posture_camera::{Camera, CameraConfig, CameraError, ReconnectingCamera};
use posture_image::ImageError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

struct ScriptedCamera {
    config: CameraConfig,
    frames: VecDeque<Result<Tensor<u8>, CameraError>>,
}

impl Camera for ScriptedCamera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| Err(CameraError::Channel("capture thread stopped".to_string())))
    }

    fn config(&self) -> &CameraConfig {
        &self.config
    }
}

fn frame(value: u8) -> Tensor<u8> {
    Tensor::new(vec![1, 1, 3], vec![value; 3]).unwrap()
}

/// Opener that records every requested config and hands out scripted cameras.
///
/// Each script entry is the frame list for one successful open, or `None`
/// for an open that fails with `Unavailable`.
#[derive(Clone, Default)]
struct Opener {
    scripts: Rc<RefCell<VecDeque<Option<Vec<Result<Tensor<u8>, CameraError>>>>>>,
    requests: Rc<RefCell<Vec<CameraConfig>>>,
}

impl Opener {
    fn new(scripts: Vec<Option<Vec<Result<Tensor<u8>, CameraError>>>>) -> Self {
        Self {
            scripts: Rc::new(RefCell::new(scripts.into())),
            requests: Rc::default(),
        }
    }

    fn open(&self, config: &CameraConfig) -> Result<ScriptedCamera, CameraError> {
        self.requests.borrow_mut().push(config.clone());
        match self.scripts.borrow_mut().pop_front().flatten() {
            Some(frames) => Ok(ScriptedCamera {
                config: config.clone(),
                frames: frames.into(),
            }),
            None => Err(CameraError::Unavailable(format!("camera {}", config.index()))),
        }
    }

    fn opens(&self) -> usize {
        self.requests.borrow().len()
    }

    fn last_size(&self) -> (u32, u32) {
        let requests = self.requests.borrow();
        let last = requests.last().unwrap();
        (last.width(), last.height())
    }
}

fn reconnecting(
    opener: &Opener,
) -> Result<
    ReconnectingCamera<ScriptedCamera, impl FnMut(&CameraConfig) -> Result<ScriptedCamera, CameraError>>,
    CameraError,
> {
    let opener = opener.clone();
    ReconnectingCamera::open(CameraConfig::default(), move |config: &CameraConfig| {
        opener.open(config)
    })
    .map(|camera| camera.with_retry_delay(Duration::ZERO))
}

#[test]
fn test_first_open_failure_is_returned() {
    let opener = Opener::new(vec![None]);
    assert!(matches!(reconnecting(&opener), Err(CameraError::Unavailable(_))));
}

#[tokio::test]
async fn test_capture_continues_after_worker_loss() {
    let opener = Opener::new(vec![
        Some(vec![Ok(frame(1))]),
        Some(vec![Ok(frame(2)), Ok(frame(3))]),
    ]);
    let mut camera = reconnecting(&opener).unwrap();

    assert_eq!(camera.recv().await.unwrap().data[0], 1);
    // first worker runs dry and reports its channel closed
    assert!(matches!(camera.recv().await, Err(CameraError::Channel(_))));
    assert!(!camera.is_connected());

    assert_eq!(camera.recv().await.unwrap().data[0], 2);
    assert_eq!(camera.recv().await.unwrap().data[0], 3);
    assert_eq!(opener.opens(), 2);
}

#[tokio::test]
async fn test_transient_errors_keep_the_camera() {
    let opener = Opener::new(vec![Some(vec![
        Err(CameraError::Decode(ImageError::Decode("corrupt".to_string()))),
        Err(CameraError::Stream("VIDIOC_DQBUF: EIO".to_string())),
        Ok(frame(7)),
    ])]);
    let mut camera = reconnecting(&opener).unwrap();

    assert!(camera.recv().await.is_err());
    assert!(camera.recv().await.is_err());
    assert!(camera.is_connected());
    assert_eq!(camera.recv().await.unwrap().data[0], 7);
    assert_eq!(opener.opens(), 1);
}

#[tokio::test]
async fn test_failed_reopen_is_retried_on_next_recv() {
    let opener = Opener::new(vec![Some(Vec::new()), None, Some(vec![Ok(frame(4))])]);
    let mut camera = reconnecting(&opener).unwrap();

    assert!(matches!(camera.recv().await, Err(CameraError::Channel(_))));
    assert!(matches!(camera.recv().await, Err(CameraError::Unavailable(_))));
    assert!(!camera.is_connected());
    assert_eq!(camera.recv().await.unwrap().data[0], 4);
    assert_eq!(opener.opens(), 3);
}

#[tokio::test]
async fn test_resize_adopts_new_size() {
    let opener = Opener::new(vec![Some(Vec::new()), Some(vec![Ok(frame(5))])]);
    let mut camera = reconnecting(&opener).unwrap();

    camera.resize(800, 600);
    assert_eq!(opener.last_size(), (800, 600));
    assert_eq!((camera.config().width(), camera.config().height()), (800, 600));
    assert_eq!(camera.recv().await.unwrap().data[0], 5);
}

#[tokio::test]
async fn test_refused_resize_falls_back_to_previous_size() {
    let opener = Opener::new(vec![Some(Vec::new()), None, Some(vec![Ok(frame(6))])]);
    let mut camera = reconnecting(&opener).unwrap();

    camera.resize(1920, 1080);
    assert!(camera.is_connected());
    assert_eq!(opener.last_size(), (640, 480));
    assert_eq!((camera.config().width(), camera.config().height()), (640, 480));
    assert_eq!(camera.recv().await.unwrap().data[0], 6);
}

#[tokio::test]
async fn test_resize_with_device_gone_recovers_later() {
    let opener = Opener::new(vec![Some(Vec::new()), None, None, Some(vec![Ok(frame(8))])]);
    let mut camera = reconnecting(&opener).unwrap();

    camera.resize(320, 240);
    assert!(!camera.is_connected());
    assert_eq!(camera.recv().await.unwrap().data[0], 8);
    assert_eq!(opener.last_size(), (640, 480));
}
