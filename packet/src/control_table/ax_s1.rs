//! AX-S1 sensor module.

items! {
    ModelNumber = 0x00, U16, ReadOnly, "Model Number";
    FirmwareVersion = 0x02, U8, ReadOnly, "Firmware Version";
    Id = 0x03, U8, ReadWrite, "ID";
    BaudRate = 0x04, U8, ReadWrite, "Baud Rate";
    ReturnDelayTime = 0x05, U8, ReadWrite, "Return Delay Time";
    StatusReturnLevel = 0x10, U8, ReadWrite, "Status Return Level";
    IrLeftFireData = 0x1A, U8, ReadOnly, "IR Left Fire Data";
    IrCenterFireData = 0x1B, U8, ReadOnly, "IR Center Fire Data";
    IrRightFireData = 0x1C, U8, ReadOnly, "IR Right Fire Data";
    LightLeftData = 0x1D, U8, ReadOnly, "Light Left Data";
    LightCenterData = 0x1E, U8, ReadOnly, "Light Center Data";
    LightRightData = 0x1F, U8, ReadOnly, "Light Right Data";
    IrObstacleDetected = 0x20, U8, ReadOnly, "IR Obstacle Detected";
    LightDetected = 0x21, U8, ReadOnly, "Light Detected";
    SoundData = 0x23, U8, ReadOnly, "Sound Data";
    SoundDataMaxHold = 0x24, U8, ReadWrite, "Sound Data Max Hold";
    SoundDetectedCount = 0x25, U8, ReadWrite, "Sound Detected Count";
    SoundDetectedTime = 0x26, U16, ReadWrite, "Sound Detected Time";
    BuzzerNote = 0x28, U8, ReadWrite, "Buzzer Note";
    BuzzerRingingTime = 0x29, U8, ReadWrite, "Buzzer Ringing Time";
    Registered = 0x2C, U8, ReadWrite, "Registered";
    IrRemoconArrived = 0x2E, U8, ReadOnly, "IR Remocon Arrived";
    Lock = 0x2F, U8, ReadWrite, "Lock";
    RemoconRx = 0x30, U16, ReadOnly, "Remocon RX Data";
    RemoconTx = 0x32, U16, ReadWrite, "Remocon TX Data";
    IrObstacleDetectCompare = 0x34, U8, ReadWrite, "IR Obstacle Detect Compare";
    LightDetectCompare = 0x35, U8, ReadWrite, "Light Detect Compare";
}
