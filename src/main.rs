//! zendoc binary - mounts the browser and runs the event loop.

use std::io;
use std::rc::Rc;

use zendoc::app::{mount, run};
use zendoc::state::clipboard::BufferClipboard;
use zendoc::storage::FileStorage;

fn main() -> io::Result<()> {
    let storage = Rc::new(FileStorage::default_location());
    let clipboard = Rc::new(BufferClipboard::new());

    let handle = mount(storage, clipboard)?;
    let result = run(&handle);
    handle.unmount();
    result
}
