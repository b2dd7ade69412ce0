//! AX-12 actuator.

items! {
    ModelNumber = 0x00, U16, ReadOnly, "Model Number";
    FirmwareVersion = 0x02, U8, ReadOnly, "Firmware Version";
    Id = 0x03, U8, ReadWrite, "ID";
    BaudRate = 0x04, U8, ReadWrite, "Baud Rate";
    ReturnDelayTime = 0x05, U8, ReadWrite, "Return Delay Time";
    CwAngleLimit = 0x06, U16, ReadWrite, "CW Angle Limit";
    CcwAngleLimit = 0x08, U16, ReadWrite, "CCW Angle Limit";
    TemperatureLimit = 0x0B, U8, ReadWrite, "Temperature Limit";
    MinVoltageLimit = 0x0C, U8, ReadWrite, "Min Voltage Limit";
    MaxVoltageLimit = 0x0D, U8, ReadWrite, "Max Voltage Limit";
    MaxTorque = 0x0E, U16, ReadWrite, "Max Torque";
    StatusReturnLevel = 0x10, U8, ReadWrite, "Status Return Level";
    AlarmLed = 0x11, U8, ReadWrite, "Alarm LED";
    Shutdown = 0x12, U8, ReadWrite, "Shutdown";
    TorqueEnable = 0x18, U8, ReadWrite, "Torque Enable";
    Led = 0x19, U8, ReadWrite, "LED";
    CwComplianceMargin = 0x1A, U8, ReadWrite, "CW Compliance Margin";
    CcwComplianceMargin = 0x1B, U8, ReadWrite, "CCW Compliance Margin";
    CwComplianceSlope = 0x1C, U8, ReadWrite, "CW Compliance Slope";
    CcwComplianceSlope = 0x1D, U8, ReadWrite, "CCW Compliance Slope";
    GoalPosition = 0x1E, U16, ReadWrite, "Goal Position";
    MovingSpeed = 0x20, U16, ReadWrite, "Moving Speed";
    TorqueLimit = 0x22, U16, ReadWrite, "Torque Limit";
    PresentPosition = 0x24, U16, ReadOnly, "Present Position";
    PresentSpeed = 0x26, U16, ReadOnly, "Present Speed";
    PresentLoad = 0x28, U16, ReadOnly, "Present Load";
    PresentVoltage = 0x2A, U8, ReadOnly, "Present Voltage";
    PresentTemperature = 0x2B, U8, ReadOnly, "Present Temperature";
    Registered = 0x2C, U8, ReadOnly, "Registered";
    Moving = 0x2E, U8, ReadOnly, "Moving";
    Lock = 0x2F, U8, ReadWrite, "Lock";
    Punch = 0x30, U16, ReadWrite, "Punch";
}
